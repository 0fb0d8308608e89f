pub mod count;
pub mod frequency;
pub mod lattice;


pub use count::SupportCounter;
pub use frequency::FrequencyTable;
pub use lattice::{FrequentItemset, ItemsetLattice, LevelResult};
