pub mod stack;
pub mod template;
