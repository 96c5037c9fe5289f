mod name_allocator;
mod operation_namer;

pub use name_allocator::NameAllocator;
pub use operation_namer::OperationNamer;
pub use operation_namer::capitalize;
