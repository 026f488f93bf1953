use serde::{Deserialize, Deserializer, Serialize};

/// Dummy destination the catalog returns for every project; never offered to users.
pub const PLACEHOLDER_DESTINATION_ID: &str = "Repeater";

/// Destination record as served by the catalog or supplied by the embedder.
///
/// Catalog entries identify themselves through `creationName`; the `id` field
/// they carry is an opaque catalog identifier that normalization replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

/// Catalog entries sometimes carry `null` for descriptive fields.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogDestination {
    pub fn new(creation_name: impl Into<String>) -> Self {
        let creation_name = creation_name.into();
        Self {
            name: creation_name.clone(),
            creation_name: Some(creation_name),
            ..Self::default()
        }
    }

    /// Key under which this destination appears in an integrations map.
    pub fn integration_name(&self) -> Option<&str> {
        self.creation_name.as_deref()
    }

    /// Renames `creationName` to `id`. Records without a `creationName` keep
    /// their raw `id`; records with neither are unusable and yield `None`.
    pub fn into_destination(self) -> Option<Destination> {
        let id = self.creation_name.or(self.id)?;
        Some(Destination {
            id,
            name: self.name,
            description: self.description,
            website: self.website,
            category: self.category,
        })
    }
}

/// Normalized destination, identified by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub category: String,
}

impl Destination {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Self::default()
        }
    }
}

/// Renames, filters, sorts and deduplicates a merged destination list.
///
/// The sort is stable and byte-wise on `id`, so equal ids end up adjacent and
/// the first record in input order survives deduplication.
pub fn normalize_destinations<I>(records: I) -> Vec<Destination>
where
    I: IntoIterator<Item = CatalogDestination>,
{
    let mut destinations: Vec<Destination> = records
        .into_iter()
        .filter_map(CatalogDestination::into_destination)
        .filter(|d| d.id != PLACEHOLDER_DESTINATION_ID)
        .collect();

    destinations.sort_by(|a, b| a.id.cmp(&b.id));
    destinations.dedup_by(|later, earlier| later.id == earlier.id);
    destinations
}
