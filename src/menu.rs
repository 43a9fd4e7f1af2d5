pub const MENU_ROOT: &str = "OCIO";
pub const PRESETS_SUBMENU: &str = "OCIO/Presets";
pub const REMOVE_SUBMENU: &str = "OCIO/Remove Preset";
pub const CURRENT_CONFIG_PATH: &str = "OCIO/Current OCIO Config";
pub const SAVE_PRESET_PATH: &str = "OCIO/Save Preset";

/// What selecting a menu entry does. Preset names are display names (`/` already replaced).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    ApplyPreset(String),
    ShowCurrentConfig,
    SavePreset,
    RemovePreset(String),
}

impl MenuAction {
    pub fn describe(&self) -> &'static str {
        match self {
            MenuAction::ApplyPreset(_) => "Apply the stored transforms",
            MenuAction::ShowCurrentConfig => "Report the active OCIO config",
            MenuAction::SavePreset => "Store the current transforms under a new name",
            MenuAction::RemovePreset(_) => "Delete this preset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// `/`-delimited menu path, e.g. `OCIO/Presets/Day`.
    pub path: String,
    pub action: MenuAction,
}

impl MenuEntry {
    pub fn new(path: impl Into<String>, action: MenuAction) -> Self {
        Self {
            path: path.into(),
            action,
        }
    }

    /// Final path segment, the label the host shows for the entry.
    pub fn label(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Ordered menu-path to action mapping handed to the host on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menus {
    entries: Vec<MenuEntry>,
}

impl Menus {
    /// Apply entries, the two static entries, then remove entries, each in list order.
    pub fn for_presets<S: AsRef<str>>(display_names: &[S]) -> Self {
        let mut menus = Menus::default();

        for name in display_names {
            let name = name.as_ref();
            menus.insert(
                format!("{PRESETS_SUBMENU}/{name}"),
                MenuAction::ApplyPreset(name.to_string()),
            );
        }

        menus.insert(CURRENT_CONFIG_PATH, MenuAction::ShowCurrentConfig);
        menus.insert(SAVE_PRESET_PATH, MenuAction::SavePreset);

        for name in display_names {
            let name = name.as_ref();
            menus.insert(
                format!("{REMOVE_SUBMENU}/{name}"),
                MenuAction::RemovePreset(name.to_string()),
            );
        }

        menus
    }

    /// Insert keeping the first position of a path; a repeated path only rebinds its action.
    pub fn insert(&mut self, path: impl Into<String>, action: MenuAction) {
        let path = path.into();
        match self.entries.iter_mut().find(|entry| entry.path == path) {
            Some(existing) => existing.action = action,
            None => self.entries.push(MenuEntry::new(path, action)),
        }
    }

    pub fn get(&self, path: &str) -> Option<&MenuAction> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.action)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Menus {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
