use serde::Deserialize;

pub const PLACEHOLDER: &str = "N/A";

pub const HEADERS: [&str; 6] = [
    "User Name",
    "First Name",
    "Last Name",
    "Middle Name",
    "Gender",
    "Age",
];

/// One record of the People entity set as the service returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonRow {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

impl PersonRow {
    /// Display cells in table order. Absent, null and empty fields become
    /// [`PLACEHOLDER`].
    pub fn cells(&self) -> [String; 6] {
        [
            text_or_placeholder(self.user_name.as_deref()),
            text_or_placeholder(self.first_name.as_deref()),
            text_or_placeholder(self.last_name.as_deref()),
            text_or_placeholder(self.middle_name.as_deref()),
            text_or_placeholder(self.gender.as_deref()),
            self.age
                .map(|age| age.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ]
    }
}
