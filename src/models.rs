// Response shapes for a phone number lookup.
//
// Every member of `Data` is an `Option`: the service only returns what was
// requested and available, and the renderer keys off presence. A JSON
// `null` and a missing key both come out as `None`, while an empty string
// stays `Some("")`.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level envelope returned by the lookup endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LookupResult {
    #[serde(default, deserialize_with = "null_default")]
    pub data: Data,
    #[serde(default, deserialize_with = "null_default")]
    pub missed: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub number: String,
    /// Explanatory text; set in sandbox mode.
    #[serde(default, deserialize_with = "null_default")]
    pub note: String,
    #[serde(default, deserialize_with = "null_default")]
    pub pricing: Pricing,
    #[serde(default, deserialize_with = "null_default")]
    pub status: bool,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: String,
}

/// The personal info fields of a lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Data {
    pub address: Option<String>,
    pub carrier: Option<Carrier>,
    /// Carrier the number was originally assigned to.
    pub carrier_o: Option<Carrier>,
    pub cnam: Option<String>,
    pub expanded_name: Option<ExpandedName>,
    pub gender: Option<String>,
    pub image: Option<Image>,
    pub line_provider: Option<LineProvider>,
    pub linetype: Option<String>,
    pub location: Option<Location>,
    pub name: Option<String>,
    pub profile: Option<Profile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Carrier {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedName {
    #[serde(default, deserialize_with = "null_default")]
    pub first: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last: String,
}

/// Image URLs. The service expires these links after 30 days.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(default, deserialize_with = "null_default")]
    pub cover: String,
    #[serde(default, deserialize_with = "null_default")]
    pub large: String,
    #[serde(default, deserialize_with = "null_default")]
    pub med: String,
    #[serde(default, deserialize_with = "null_default")]
    pub small: String,
}

/// Consumer facing line provider (Google Voice, MagicJack, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LineProvider {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub mms_email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub sms_email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Geo {
    #[serde(default, deserialize_with = "null_default")]
    pub latitude: String,
    #[serde(default, deserialize_with = "null_default")]
    pub longitude: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_default")]
    pub geo: Geo,
    #[serde(default, deserialize_with = "null_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_default")]
    pub zip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_default")]
    pub edu: String,
    #[serde(default, deserialize_with = "null_default")]
    pub job: String,
    #[serde(default, deserialize_with = "null_default")]
    pub relationship: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Pricing {
    #[serde(default, deserialize_with = "null_default")]
    pub breakdown: Breakdown,
    #[serde(default, deserialize_with = "null_default")]
    pub total: f64,
}

/// Per-field cost of a lookup. Items the service leaves out count as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Breakdown {
    #[serde(deserialize_with = "null_default")]
    pub address: f64,
    #[serde(deserialize_with = "null_default")]
    pub carrier: f64,
    // The service spells this key with a zero.
    #[serde(rename = "carrier_0", alias = "carrier_o", deserialize_with = "null_default")]
    pub carrier_o: f64,
    #[serde(deserialize_with = "null_default")]
    pub cnam: f64,
    #[serde(deserialize_with = "null_default")]
    pub expanded_name: f64,
    #[serde(deserialize_with = "null_default")]
    pub gender: f64,
    #[serde(deserialize_with = "null_default")]
    pub image: f64,
    #[serde(deserialize_with = "null_default")]
    pub line_provider: f64,
    #[serde(deserialize_with = "null_default")]
    pub linetype: f64,
    #[serde(deserialize_with = "null_default")]
    pub location: f64,
    #[serde(deserialize_with = "null_default")]
    pub name: f64,
    #[serde(deserialize_with = "null_default")]
    pub profile: f64,
}

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
