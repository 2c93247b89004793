pub mod event;
pub mod lines;
pub mod stream;

pub use event::{EventAssembler, SseEvent};
pub use lines::LineBuffer;
pub use stream::{DONE_EVENT, StreamCallbacks, StreamHandle};
