//! IRIs used by the page statements.

/// `terminated` verb.
pub const VERB_TERMINATED: &str = "http://adlnet.gov/expapi/verbs/terminated";
/// `viewed` verb.
pub const VERB_VIEWED: &str = "http://id.tincanapi.com/verb/viewed";

/// Activity type of a web page.
pub const ACTIVITY_TYPE_PAGE: &str = "http://activitystrea.ms/schema/1.0/page";
