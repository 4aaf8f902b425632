//! Wire-level and presentation constants shared across the workspace.

/// Path of the discrete-state bounds lookup endpoint.
pub const MAX_STATE_ENDPOINT: &str = "/find_discrete_data_max_state";

/// Path of the average-treatment-effect estimation endpoint.
pub const ATE_ENDPOINT: &str = "/ate";

/// Path of the conditional-average-treatment-effect estimation endpoint.
pub const CATE_ENDPOINT: &str = "/cate";

/// Decimal places shown for estimated and ground-truth effect values.
pub const DISPLAY_DECIMALS: u32 = 2;
