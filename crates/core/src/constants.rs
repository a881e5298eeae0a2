/// Fixed salt prepended to every password before hashing.
///
/// This is the documented legacy scheme: one global salt shared by all
/// users. It is reproduced as-is for compatibility with existing
/// databases, not endorsed. See DESIGN.md.
pub const AUTH_SALT: &str = "streamlit_crm_demo_salt";

/// Username of the documented bootstrap account seeded by migrations.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Date format used for all date columns (ISO-8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default sidebar filter window: last 60 days through today.
pub const DEFAULT_FILTER_WINDOW_DAYS: i64 = 60;

/// Industry sectors offered by client and tracker forms.
pub const SECTORS: [&str; 13] = [
    "Oil & Gas / Petroleum Refining & Storage",
    "Power Generation",
    "Mining & Mineral Processing",
    "Steel & Metal Processing",
    "Cement & Building Materials",
    "Food & Beverage Manufacturing",
    "Cocoa & Agro-Processing",
    "Chemicals & Pharmaceuticals",
    "Textiles & Light Manufacturing",
    "LNG / LPG & Fuel Storage",
    "Water Treatment & Utilities",
    "Pulp & Paper / Printing",
    "Shipyards & Marine",
];

/// Regions offered by the client form and sidebar filter.
pub const REGIONS: [&str; 16] = [
    "Greater Accra",
    "Ashanti",
    "Western",
    "Western North",
    "Central",
    "Eastern",
    "Volta",
    "Oti",
    "Northern",
    "Savannah",
    "North East",
    "Upper East",
    "Upper West",
    "Bono",
    "Bono East",
    "Ahafo",
];

/// Interaction action types.
pub const ACTION_TYPES: [&str; 6] = [
    "Call",
    "Email",
    "Meeting",
    "Proposal",
    "Follow-up",
    "Site Visit",
];

/// Lead funnel stages, in fixed display order.
pub const LEAD_STAGES: [&str; 4] = ["Lead", "Opportunity", "Client", "Lost"];

/// Campaign types.
pub const CAMPAIGN_TYPES: [&str; 6] = [
    "Trade Show",
    "Email Campaign",
    "Event",
    "Digital Ads",
    "Outbound Push",
    "Other",
];

/// User roles.
pub const ROLES: [&str; 4] = ["Admin", "Marketing Manager", "Sales Rep", "Viewer"];

/// Meeting statuses. New meetings default to the first entry.
pub const MEETING_STATUSES: [&str; 3] = ["Planned", "Held", "Cancelled"];

/// Task statuses. New tasks default to the first entry.
pub const TASK_STATUSES: [&str; 3] = ["Open", "In Progress", "Done"];

/// Interaction action type counted as a proposal for target progress.
pub const PROPOSAL_ACTION_TYPE: &str = "Proposal";
