use thiserror::Error;

use super::device::ShaderKind;

/// Erreurs fatales d'initialisation du pipeline de rendu.
///
/// Aucune n'est récupérable : elles remontent jusqu'à `main` qui les
/// journalise puis arrête le programme.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("{kind} shader compilation failed:\n{log}")]
    ShaderCompile { kind: ShaderKind, log: String },

    #[error("shader program link failed:\n{log}")]
    Link { log: String },

    #[error("'{name}' not found in the linked shader program")]
    MissingLocation { name: String },

    #[error("shader source contains an interior NUL byte")]
    SourceContainsNul,
}
