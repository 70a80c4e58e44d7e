use std::fmt;
use std::str::FromStr;

/// What a cache fault does to the request that hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheFaultPolicy {
    /// Log the fault and carry on as a miss. The store stays the only authority.
    #[default]
    Degrade,
    /// Abort the request with a server error. A write whose invalidation
    /// fails has still been committed to the store.
    Fail,
}

impl CacheFaultPolicy {
    pub fn is_fatal(&self) -> bool {
        matches!(self, CacheFaultPolicy::Fail)
    }
}

impl FromStr for CacheFaultPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(CacheFaultPolicy::Degrade),
            "fail" => Ok(CacheFaultPolicy::Fail),
            other => Err(format!("unknown cache fault policy: {other}")),
        }
    }
}

impl fmt::Display for CacheFaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheFaultPolicy::Degrade => f.write_str("degrade"),
            CacheFaultPolicy::Fail => f.write_str("fail"),
        }
    }
}
