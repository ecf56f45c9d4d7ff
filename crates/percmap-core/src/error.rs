pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Solver(#[from] percmap_solver::Error),

    #[error("duplicate brand name: {name}")]
    DuplicateBrand { name: String },

    #[error("duplicate attribute id: {id}")]
    DuplicateAttribute { id: String },
}
