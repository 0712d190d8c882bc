use log::{debug, info};

use super::device::GraphicsDevice;
use super::shader::ShaderProgram;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderVariant {
    #[default]
    Default,
    Alternate,
}

/// Programmes déjà construits, un par variante, et la variante sélectionnée.
///
/// Basculer de variante ne recompile rien : on choisit simplement un autre
/// programme. Aucune variante alternative n'est fournie aujourd'hui ;
/// `register_alternate` est le point d'extension. Sans elle, sélectionner
/// `Alternate` continue de dessiner avec le programme par défaut.
pub struct ShaderLibrary {
    default: ShaderProgram,
    alternate: Option<ShaderProgram>,
    selected: ShaderVariant,
}

impl ShaderLibrary {
    pub fn new(default: ShaderProgram) -> Self {
        Self {
            default,
            alternate: None,
            selected: ShaderVariant::Default,
        }
    }

    /// Enregistre le programme alternatif ; renvoie le précédent s'il existait
    /// (à détruire par l'appelant).
    pub fn register_alternate(&mut self, program: ShaderProgram) -> Option<ShaderProgram> {
        self.alternate.replace(program)
    }

    pub fn selected(&self) -> ShaderVariant {
        self.selected
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }

    /// `true` sélectionne la variante alternative, `false` celle par défaut.
    pub fn toggle(&mut self, alternate: bool) -> ShaderVariant {
        let variant = if alternate {
            ShaderVariant::Alternate
        } else {
            ShaderVariant::Default
        };
        if variant != self.selected {
            info!("🎨 Shader variant: {:?}", variant);
            if variant == ShaderVariant::Alternate && self.alternate.is_none() {
                debug!("no alternate shader registered, drawing with the default program");
            }
        }
        self.selected = variant;
        variant
    }

    /// Programme effectivement utilisé pour dessiner.
    pub fn active(&self) -> &ShaderProgram {
        match (self.selected, &self.alternate) {
            (ShaderVariant::Alternate, Some(program)) => program,
            _ => &self.default,
        }
    }

    pub fn delete_all<D: GraphicsDevice>(&mut self, device: &mut D) {
        self.default.delete(device);
        if let Some(program) = self.alternate.take() {
            program.delete(device);
        }
    }
}
