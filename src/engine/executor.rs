use std::str::FromStr;

use super::value::View;
use super::{
    browsers, clients, countries, daily, engagement, engines, environments, falloff, summary,
};
use crate::error::Error;
use crate::model::RecordSet;

/// The fixed set of views the dashboard renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewKind {
    Summary,
    Falloff,
    Engagement,
    Daily,
    Clients,
    Environments,
    Engines,
    Browsers,
    Countries,
}

impl ViewKind {
    pub const ALL: [ViewKind; 9] = [
        ViewKind::Summary,
        ViewKind::Falloff,
        ViewKind::Engagement,
        ViewKind::Daily,
        ViewKind::Clients,
        ViewKind::Environments,
        ViewKind::Engines,
        ViewKind::Browsers,
        ViewKind::Countries,
    ];

    /// Stable token used for CLI selection and the JSON envelope.
    pub fn token(self) -> &'static str {
        match self {
            ViewKind::Summary => "summary",
            ViewKind::Falloff => "falloff",
            ViewKind::Engagement => "engagement",
            ViewKind::Daily => "daily",
            ViewKind::Clients => "clients",
            ViewKind::Environments => "environments",
            ViewKind::Engines => "engines",
            ViewKind::Browsers => "browsers",
            ViewKind::Countries => "countries",
        }
    }

    /// Display title, as the dashboard labels the rendered widget.
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Summary => "Activity Summary",
            ViewKind::Falloff => "Read Time Falloff",
            ViewKind::Engagement => "Engagement Time Distribution",
            ViewKind::Daily => "Daily Activity",
            ViewKind::Clients => "Top Email Clients",
            ViewKind::Environments => "Reading Environment",
            ViewKind::Engines => "Rendering Engines",
            ViewKind::Browsers => "Browser Usage",
            ViewKind::Countries => "Countries",
        }
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        ViewKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| format!("unknown view '{}'", s).into())
    }
}

/// Computes one view from the record set. Views never fail: malformed or
/// missing fields degrade into zero counts or catch-all buckets. Every view
/// reads the same immutable records, so any subset may run concurrently.
pub fn execute(kind: ViewKind, records: &RecordSet) -> View {
    match kind {
        ViewKind::Summary => summary::activity_summary(records),
        ViewKind::Falloff => falloff::read_time_falloff(records),
        ViewKind::Engagement => engagement::engagement_distribution(records),
        ViewKind::Daily => daily::daily_activity(records),
        ViewKind::Clients => clients::email_clients(records),
        ViewKind::Environments => environments::reading_environments(records),
        ViewKind::Engines => engines::rendering_engines(records),
        ViewKind::Browsers => browsers::browser_usage(records),
        ViewKind::Countries => countries::country_opens(records),
    }
}
