use ratatui::style::Color;

/// 색상 테마
///
/// 이름으로 전환 가능한 미리 정의된 테마(dark, light)를 제공합니다.
#[derive(Debug, Clone)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 목록
    pub list_border: ColorDef,
    pub list_bg: ColorDef,
    pub item_cursor_fg: ColorDef,
    pub item_cursor_bg: ColorDef,
    pub item_marked: ColorDef,
    pub item_index: ColorDef,

    // 바
    pub title_bar_bg: ColorDef,
    pub title_bar_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")
#[derive(Debug, Clone)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ratatui Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            list_border: "#0078d4".into(),
            list_bg: "#1e1e1e".into(),
            item_cursor_fg: "#ffffff".into(),
            item_cursor_bg: "#264f78".into(),
            item_marked: "#e5c07b".into(),
            item_index: "#6e7681".into(),

            title_bar_bg: "#2d2d30".into(),
            title_bar_fg: "#d4d4d4".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#1e1e1e".into(),
            command_bar_fg: "#d4d4d4".into(),

            accent: "#0078d4".into(),
            warning: "#cca700".into(),
            error: "#f14c4c".into(),
            success: "#89d185".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            list_border: "#005fb8".into(),
            list_bg: "#ffffff".into(),
            item_cursor_fg: "#000000".into(),
            item_cursor_bg: "#cce4f7".into(),
            item_marked: "#b15c00".into(),
            item_index: "#8c8c8c".into(),

            title_bar_bg: "#f3f3f3".into(),
            title_bar_fg: "#1e1e1e".into(),
            status_bar_bg: "#005fb8".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#005fb8".into(),
            warning: "#bf8803".into(),
            error: "#e51400".into(),
            success: "#388a34".into(),
        }
    }
}

/// 테마 관리자
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
            ],
        }
    }

    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().find(|(n, _)| n == name) {
            Some((n, theme)) => {
                self.current_name = n.clone();
                self.current_theme = theme.clone();
                Ok(())
            }
            None => Err(format!("테마를 찾을 수 없습니다: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        let current_index = self
            .available_themes
            .iter()
            .position(|(n, _)| *n == self.current_name)
            .unwrap_or(0);
        let next_index = (current_index + 1) % self.available_themes.len();
        let (name, theme) = self.available_themes[next_index].clone();
        self.current_name = name;
        self.current_theme = theme;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#123"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("Red"), Color::Red);
        assert_eq!(parse_named_color("unknown"), Color::Reset);
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert_eq!(
            manager.current().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );
        assert!(manager.switch_theme("neon").is_err());
        assert_eq!(manager.current_name(), "light");
    }

    #[test]
    fn test_theme_cycling() {
        let mut manager = ThemeManager::new();
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "light");
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "dark");
    }
}
