use crate::error::{AppError, Result};
use crate::records::{Preset, Records, Transforms};

/// The ordered preset list plus the file it is persisted to.
///
/// Mutations here are in-memory only; callers persist with [`PresetStore::save_settings`].
/// Names are not unique: lookups act on the first preset whose display name matches.
#[derive(Debug)]
pub struct PresetStore {
    records: Records,
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Start with an empty list; nothing is read until [`PresetStore::load_settings`].
    pub fn new(records: Records) -> Self {
        Self {
            records,
            presets: Vec::new(),
        }
    }

    pub fn with_presets(records: Records, presets: Vec<Preset>) -> Self {
        Self { records, presets }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Replace the list with the settings file contents. A missing file keeps the
    /// current list; a broken one leaves the list empty and returns the error.
    pub fn load_settings(&mut self) -> Result<()> {
        match self.records.load_presets() {
            Ok(Some(presets)) => {
                log::debug!(
                    "Loaded {} presets from {}",
                    presets.len(),
                    self.records.settings_path().display()
                );
                self.presets = presets;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                self.presets.clear();
                Err(err)
            }
        }
    }

    pub fn save_settings(&self) -> Result<()> {
        self.records.save_presets(&self.presets)?;
        log::debug!(
            "Saved {} presets to {}",
            self.presets.len(),
            self.records.settings_path().display()
        );
        Ok(())
    }

    /// Display names in list order.
    pub fn preset_names(&self) -> Vec<String> {
        self.presets.iter().map(Preset::display_name).collect()
    }

    /// One past the highest `order`, or 1 for an empty list. Saturates at `i64::MAX`.
    pub fn next_preset_number(&self) -> i64 {
        self.presets
            .iter()
            .map(|preset| preset.order)
            .max()
            .map_or(1, |highest| highest.saturating_add(1))
    }

    pub fn find(&self, display_name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|preset| preset.matches_display_name(display_name))
    }

    pub fn transforms_from_name(&self, display_name: &str) -> Result<Transforms> {
        self.find(display_name)
            .map(|preset| preset.transforms.clone())
            .ok_or_else(|| AppError::not_found(display_name))
    }

    /// Append a preset numbered after the current highest `order`.
    pub fn add_preset(&mut self, name: impl Into<String>, transforms: Transforms) -> &Preset {
        let preset = Preset::new(self.next_preset_number(), name, transforms);
        self.presets.push(preset);
        &self.presets[self.presets.len() - 1]
    }

    /// Remove the first preset with this display name, leaving later duplicates.
    pub fn remove_preset(&mut self, display_name: &str) -> Result<Preset> {
        let index = self
            .presets
            .iter()
            .position(|preset| preset.matches_display_name(display_name))
            .ok_or_else(|| AppError::not_found(display_name))?;
        Ok(self.presets.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(order: i64, name: &str) -> Preset {
        Preset::new(order, name, Transforms::new(format!("{name}-in"), "view", "look"))
    }

    fn store_with(presets: Vec<Preset>) -> PresetStore {
        PresetStore::with_presets(Records::with_path("unused/presets.json"), presets)
    }

    #[test]
    fn next_number_starts_at_one() {
        assert_eq!(store_with(Vec::new()).next_preset_number(), 1);
    }

    #[test]
    fn next_number_follows_highest_order() {
        let store = store_with(vec![preset(3, "a"), preset(1, "b"), preset(4, "c")]);
        assert_eq!(store.next_preset_number(), 5);
    }

    #[test]
    fn names_replace_slashes() {
        let store = store_with(vec![preset(1, "A/B"), preset(2, "C")]);
        assert_eq!(store.preset_names(), vec!["A-B", "C"]);
    }

    #[test]
    fn lookup_uses_display_name() {
        let store = store_with(vec![preset(1, "Shots/Day")]);

        let transforms = store.transforms_from_name("Shots-Day").expect("found");
        assert_eq!(transforms.idt, "Shots/Day-in");

        let err = store.transforms_from_name("Shots/Day").expect_err("raw name misses");
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_takes_only_first_duplicate() {
        let mut store = store_with(vec![preset(1, "Dup"), preset(2, "Keep"), preset(3, "Dup")]);

        let removed = store.remove_preset("Dup").expect("removed");

        assert_eq!(removed.order, 1);
        assert_eq!(store.preset_names(), vec!["Keep", "Dup"]);
        assert_eq!(store.presets()[1].order, 3);
    }

    #[test]
    fn remove_miss_leaves_list_alone() {
        let mut store = store_with(vec![preset(1, "A")]);
        assert!(store.remove_preset("B").expect_err("miss").is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_numbers_after_gaps() {
        let mut store = store_with(vec![preset(2, "A"), preset(9, "B")]);
        let added = store.add_preset("C", Transforms::default());
        assert_eq!(added.order, 10);
        assert_eq!(store.preset_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn broken_settings_file_empties_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "[{\"order\": \"nope\"}]").expect("write");

        let mut store = PresetStore::with_presets(Records::with_path(&path), vec![preset(1, "A")]);

        assert!(store.load_settings().is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn next_number_saturates_at_largest_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("presets.json");
        std::fs::write(
            &path,
            r#"[{"order": 9223372036854775807, "name": "Last", "IDT": "a", "ODT": "b", "Look": "c"}]"#,
        )
        .expect("write");

        let mut store = PresetStore::new(Records::with_path(&path));
        store.load_settings().expect("load");

        assert_eq!(store.next_preset_number(), i64::MAX);
        assert_eq!(store.add_preset("Next", Transforms::default()).order, i64::MAX);
    }

    #[test]
    fn orders_outside_u32_load_and_survive_a_save() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("presets.json");
        std::fs::write(
            &path,
            r#"[
                {"order": 1, "name": "Keep", "IDT": "a", "ODT": "b", "Look": "c"},
                {"order": -1, "name": "Negative", "IDT": "a", "ODT": "b", "Look": "c"},
                {"order": 4294967295, "name": "Big", "IDT": "a", "ODT": "b", "Look": "c"}
            ]"#,
        )
        .expect("write");

        let mut store = PresetStore::new(Records::with_path(&path));
        store.load_settings().expect("load");
        assert_eq!(store.preset_names(), vec!["Keep", "Negative", "Big"]);
        assert_eq!(store.next_preset_number(), 4_294_967_296);

        store.add_preset("New", Transforms::default());
        store.save_settings().expect("save");

        let mut reloaded = PresetStore::new(Records::with_path(&path));
        reloaded.load_settings().expect("reload");
        assert_eq!(reloaded.preset_names(), vec!["Keep", "Negative", "Big", "New"]);
        assert_eq!(reloaded.presets()[1].order, -1);
    }

    #[test]
    fn missing_settings_file_keeps_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let records = Records::with_path(dir.path().join("OCIO_Presets").join("p.json"));
        let mut store = PresetStore::with_presets(records, vec![preset(1, "A")]);

        store.load_settings().expect("missing file is fine");
        assert_eq!(store.len(), 1);
    }
}
