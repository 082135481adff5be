/// Use cases module containing application business logic orchestration
mod load_component_tree;

pub use load_component_tree::LoadComponentTreeUseCase;
