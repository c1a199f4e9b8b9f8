/// Builds a batch for [`activate`](crate::activate) from mixed constraints
/// and constraint vectors.
///
/// Each element is converted with [`Activatable::from`](crate::Activatable),
/// so single constraints, vectors, arrays and nested batches can be listed
/// side by side.
///
/// # Usage
///
/// ```ignore
/// let batch = batch![
///     icon.width().equal_to(24.0),
///     pin_edges(&content, 8)?,
///     title.leading().equal_to(icon.trailing() + 8.0),
/// ];
/// activate(batch, &mut solver);
/// ```
#[macro_export]
macro_rules! batch {
    ($($item:expr),* $(,)?) => {
        ::std::vec![$($crate::Activatable::from($item)),*]
    };
}
