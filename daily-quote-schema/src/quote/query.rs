use serde::{Deserialize, Serialize};

/// Query string of `GET /quotes`.
///
/// Both parameters are optional; missing values fall back to `offset=0` and
/// `limit=DEFAULT_LIMIT`. Negative or non-numeric values fail to deserialize, and so does a
/// repeated key (`?limit=1&limit=2`): there is no first-or-last-wins rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListQuotesQuery {
    #[serde(default)]
    pub offset: u64,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl ListQuotesQuery {
    pub const DEFAULT_LIMIT: u32 = 10;
}

impl Default for ListQuotesQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u32 {
    ListQuotesQuery::DEFAULT_LIMIT
}
