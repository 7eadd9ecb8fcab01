use thiserror::Error;

/// Errors from the calendrical layer.
#[derive(Debug, Error, PartialEq)]
pub enum CalendarError {
    /// The Sun's sidereal longitude does not cross the target degree within
    /// the search window. Does not occur for real Earth-bound dates.
    #[error("no sidereal crossing of {target_deg} deg within the search window ending {search_end}")]
    SankrantiNotFound {
        target_deg: f64,
        search_end: chrono::DateTime<chrono::Utc>,
    },
}
