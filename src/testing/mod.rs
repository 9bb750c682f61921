
#[allow(unused_imports)]
pub use ports::{FailingTemplateSource, FakeScreenCatalog, StaticTemplateSource};
#[allow(unused_imports)]
pub use screens::{generation_result, hdmi_screen, lcd_show_screen};
