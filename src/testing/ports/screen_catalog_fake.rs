use crate::domain::ScreenDefinition;
use crate::ports::ScreenCatalog;

/// In-memory catalog over a fixed list of screens.
#[derive(Debug, Default)]
pub struct FakeScreenCatalog {
    screens: Vec<ScreenDefinition>,
}

impl FakeScreenCatalog {
    pub fn new(screens: Vec<ScreenDefinition>) -> Self {
        Self { screens }
    }
}

impl ScreenCatalog for FakeScreenCatalog {
    fn find_by_id(&self, id: &str) -> Option<&ScreenDefinition> {
        self.screens.iter().find(|screen| screen.id == id)
    }

    fn list_all(&self) -> Vec<&ScreenDefinition> {
        self.screens.iter().collect()
    }
}
