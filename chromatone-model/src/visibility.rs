/// Output sections a palette view can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Grays,
    Shades,
    Tints,
    LumAdjusted,
    Palette,
    Tones,
}

/// Per-section visibility flags. Only tones are shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Visibility {
    pub grays: bool,
    pub shades: bool,
    pub tints: bool,
    pub lum_adjusted: bool,
    pub palette: bool,
    pub tones: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            grays: false,
            shades: false,
            tints: false,
            lum_adjusted: false,
            palette: false,
            tones: true,
        }
    }
}

impl Visibility {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Grays => self.grays,
            Section::Shades => self.shades,
            Section::Tints => self.tints,
            Section::LumAdjusted => self.lum_adjusted,
            Section::Palette => self.palette,
            Section::Tones => self.tones,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        let flag = match section {
            Section::Grays => &mut self.grays,
            Section::Shades => &mut self.shades,
            Section::Tints => &mut self.tints,
            Section::LumAdjusted => &mut self.lum_adjusted,
            Section::Palette => &mut self.palette,
            Section::Tones => &mut self.tones,
        };
        *flag = visible;
    }

    /// Flip one flag and return its new value.
    pub fn toggle(&mut self, section: Section) -> bool {
        let visible = !self.get(section);
        self.set(section, visible);
        visible
    }
}
