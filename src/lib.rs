pub mod blob;
pub mod color;
pub mod constants;
pub mod content;
pub mod cursor;
pub mod media;
pub mod pointer;
pub mod reveal;
pub mod spring;
pub mod state;
pub mod trail;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
