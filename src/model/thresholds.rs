use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdProfile {
    /// A sub-score at or below this marks its group as having a low item.
    pub low_sub_score: f64,
    /// Snapshot counts pages whose overall WQ score is strictly below this.
    pub wq_attention: f64,
    /// Snapshot counts pages whose overall TV score is strictly below this.
    pub tv_attention: f64,
    pub band_high: f64,
    pub band_medium: f64,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            low_sub_score: 5.0,
            wq_attention: 6.0,
            tv_attention: 5.0,
            band_high: 9.0,
            band_medium: 6.0,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
