// Field selectors: the data points a lookup can ask the service for.
// A `FieldSet` is the ordered list that becomes the `data` request
// parameter; order is kept and duplicates are not collapsed.

use std::fmt;

/// One requestable data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Profile,
    Cnam,
    Gender,
    Image,
    Address,
    Location,
    LineProvider,
    Carrier,
    OriginalCarrier,
    Linetype,
}

impl Field {
    /// Every selector in canonical order.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Profile,
        Field::Cnam,
        Field::Gender,
        Field::Image,
        Field::Address,
        Field::Location,
        Field::LineProvider,
        Field::Carrier,
        Field::OriginalCarrier,
        Field::Linetype,
    ];

    /// The token the remote service expects for this field.
    pub fn token(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Profile => "profile",
            Field::Cnam => "cnam",
            Field::Gender => "gender",
            Field::Image => "image",
            Field::Address => "address",
            Field::Location => "location",
            Field::LineProvider => "line_provider",
            Field::Carrier => "carrier",
            Field::OriginalCarrier => "carrier_o",
            Field::Linetype => "line_type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Ordered selection of fields for a single lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Wire tokens in application order.
    pub fn tokens(&self) -> Vec<&'static str> {
        self.iter().map(Field::token).collect()
    }

    /// Comma-joined value for the `data` parameter.
    pub fn joined(&self) -> String {
        self.tokens().join(",")
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for FieldSet {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}
