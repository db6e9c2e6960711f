use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    // Country names as they appear in the export, keyed to ISO3 codes.
    // Matching is exact: no case folding, no fuzzy lookup.
    static ref COUNTRY_CODES: HashMap<&'static str, &'static str> = [
        ("United Kingdom", "GBR"),
        ("Great Britain", "GBR"),
        ("United States", "USA"),
        ("Germany", "DEU"),
        ("Switzerland", "CHE"),
        ("Ireland", "IRL"),
        ("Luxembourg", "LUX"),
        ("France", "FRA"),
        ("Spain", "ESP"),
        ("Italy", "ITA"),
        ("Netherlands", "NLD"),
        ("Belgium", "BEL"),
        ("Sweden", "SWE"),
        ("Norway", "NOR"),
        ("Denmark", "DNK"),
        ("Finland", "FIN"),
        ("Portugal", "PRT"),
        ("Austria", "AUT"),
        ("Greece", "GRC"),
        ("Poland", "POL"),
        ("Czech Republic", "CZE"),
        ("Hungary", "HUN"),
        ("Romania", "ROU"),
        ("Bulgaria", "BGR"),
        ("Croatia", "HRV"),
        ("Canada", "CAN"),
        ("Mexico", "MEX"),
        ("Brazil", "BRA"),
        ("Argentina", "ARG"),
        ("Australia", "AUS"),
        ("New Zealand", "NZL"),
        ("Japan", "JPN"),
        ("South Korea", "KOR"),
        ("China", "CHN"),
        ("India", "IND"),
        ("Russia", "RUS"),
        ("South Africa", "ZAF"),
    ]
    .iter()
    .copied()
    .collect();
}

/// ISO3 code for a country name as spelled in the export, or `None` for
/// anything outside the table. Callers decide what a miss means; it is
/// never an error here.
pub fn resolve(country_name: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(country_name).copied()
}
