/// An eligible staff member: display name plus the index of their row in
/// the schedule [`Grid`](super::Grid). The row is re-read through the grid
/// for every month tallied rather than copied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub row: usize,
}
