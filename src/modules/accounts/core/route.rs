/// Named redirect targets handed back by the use cases. The shell resolves
/// them to URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}
