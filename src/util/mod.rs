pub mod lemma;
pub mod normalize;
pub mod sets;
