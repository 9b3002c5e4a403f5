//! Cascade merging of configuration descriptors
//!
//! When discovery walks out of a non-root directory it stacks the nearer
//! descriptor on top of each ancestor. Merging rewrites the nearer descriptor
//! in place so that it reads as if the author had written the combined file:
//! ancestor presets and overrides come first, the nearer file's own entries
//! shadow ancestor entries with the same key.

use super::descriptor::ConfigDescriptor;

impl ConfigDescriptor {
    /// Merge a parent (outer-directory) descriptor underneath this one
    ///
    /// The nearer descriptor always takes precedence:
    /// - `extends` and `overrides` from the parent are prepended so the
    ///   nearer file's entries apply later and win
    /// - `parser` fills in only when the nearer file leaves it unset
    /// - `plugins` become the union, parent namespaces first
    /// - `env` and `rules` keep the nearer file's value for shared keys
    /// - `$schema` and `root` are file-specific and never merged
    pub fn merge_from_parent(&mut self, parent: ConfigDescriptor) {
        if !parent.extends.is_empty() {
            let own = std::mem::replace(&mut self.extends, parent.extends);
            self.extends.extend(own);
        }

        if self.parser.is_none() {
            self.parser = parent.parser;
        }

        if !parent.plugins.is_empty() {
            let own = std::mem::replace(&mut self.plugins, parent.plugins);
            for plugin in own {
                if !self.plugins.contains(&plugin) {
                    self.plugins.push(plugin);
                }
            }
        }

        for (name, enabled) in parent.env {
            self.env.entry(name).or_insert(enabled);
        }

        for (rule, entry) in parent.rules {
            self.rules.entry(rule).or_insert(entry);
        }

        if !parent.overrides.is_empty() {
            let own = std::mem::replace(&mut self.overrides, parent.overrides);
            self.overrides.extend(own);
        }
    }
}
