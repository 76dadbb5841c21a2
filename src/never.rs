/// What the firmware's `inner_main` returns on success, which cannot happen: it only comes back
/// with an error. A stable stand-in for `!`.
#[derive(Debug)]
pub enum Never {}
