/// Mapping from export header names to record fields, decided once per
/// parse from the header row. Unknown headers still take part in the
/// row-width check; their values are discarded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    Opened,
    Customer,
    Seconds,
    EmailClient,
    Environment,
    Platform,
    Browser,
    RenderingEngine,
    CountryName,
    Ignored,
}

impl Column {
    pub fn from_header(name: &str) -> Self {
        match name {
            "Opened" => Column::Opened,
            "Customer" => Column::Customer,
            "Seconds" => Column::Seconds,
            "Email Client" => Column::EmailClient,
            "Environment" => Column::Environment,
            "Platform" => Column::Platform,
            "Browser" => Column::Browser,
            "Rendering Engine" => Column::RenderingEngine,
            "Country Name" => Column::CountryName,
            _ => Column::Ignored,
        }
    }
}
