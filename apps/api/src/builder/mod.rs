// Resume builder: the five-step wizard, its field checks and the HTTP surface
// that validates and renders a finished document.

pub mod handlers;
pub mod validation;
pub mod wizard;
