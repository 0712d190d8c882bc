/// État des widgets du panneau de contrôle.
///
/// Le texte du champ est conservé tel que saisi, même invalide : c'est la
/// boucle de rendu qui décide de l'accepter ou non.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    pub count_text: String,
    pub alternate_shader: bool,
    /// Nombre de particules réellement affichées.
    pub active_count: usize,
    /// Dernier refus de saisie, affiché sous le champ.
    pub input_error: Option<String>,
    pub fps: f32,
}

impl ControlPanel {
    pub fn new(initial_count: usize) -> Self {
        Self {
            count_text: initial_count.to_string(),
            alternate_shader: false,
            active_count: initial_count,
            input_error: None,
            fps: 0.0,
        }
    }
}
