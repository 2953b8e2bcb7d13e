use minijinja::Environment;

use crate::greeter::PresentationModel;

static INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// The render collaborator: a template environment with the single page
/// template loaded at startup.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // The .html name keeps auto-escaping engaged for interpolated values.
        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("embedded index template parses");
        Self { env }
    }

    /// Render the index page from a presentation model.
    pub fn render_index(&self, model: &PresentationModel) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(model)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
