/// Analysis layer: pure aggregations over a [`FilteredView`].
///
/// Each operation is total (defined for the empty view), takes no lock,
/// and mutates nothing, so the host may recompute them concurrently for
/// independent criteria.
///
/// [`FilteredView`]: crate::data::filter::FilteredView

pub mod aggregate;
pub mod category;
