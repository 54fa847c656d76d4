/// How struct field names are spelled on the wire. Map keys and values are
/// never affected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldNaming {
    /// Fields are written and read exactly as serde names them.
    Identity,
    /// `developerMessage` becomes `developer_message`. This is what the API
    /// speaks.
    #[default]
    LowerCaseWithUnderscores,
}

impl FieldNaming {
    pub fn translate(&self, name: &str) -> String {
        match self {
            FieldNaming::Identity => name.to_string(),
            FieldNaming::LowerCaseWithUnderscores => lower_case_with_underscores(name),
        }
    }

    /// The declared field an incoming `key` stands for, when it is not
    /// already spelled exactly like one. Two names match when they translate
    /// to the same wire name.
    pub fn field_for(&self, key: &str, fields: &'static [&'static str]) -> Option<&'static str> {
        if fields.iter().any(|field| *field == key) {
            return None;
        }
        let wire_name = self.translate(key);
        fields
            .iter()
            .copied()
            .find(|field| self.translate(field) == wire_name)
    }
}

fn lower_case_with_underscores(name: &str) -> String {
    let mut translated = String::with_capacity(name.len() + 4);
    for character in name.chars() {
        if character.is_uppercase() {
            if !translated.is_empty() && !translated.ends_with('_') {
                translated.push('_');
            }
            translated.extend(character.to_lowercase());
        } else {
            translated.push(character);
        }
    }
    translated
}

#[cfg(test)]
mod tests {
    use crate::json_codec::field_naming::FieldNaming;

    const FIELDS: &[&str] = &["error", "developer_message", "uploadLink"];

    #[test]
    fn translates_camel_case_names() {
        let naming = FieldNaming::LowerCaseWithUnderscores;

        assert_eq!(naming.translate("developerMessage"), "developer_message");
        assert_eq!(naming.translate("error_code"), "error_code");
        assert_eq!(naming.translate("Link"), "link");
        assert_eq!(naming.translate("someURL"), "some_u_r_l");
        assert_eq!(naming.translate("already_Mixed"), "already_mixed");
    }

    #[test]
    fn identity_leaves_names_alone() {
        assert_eq!(FieldNaming::Identity.translate("developerMessage"), "developerMessage");
    }

    #[test]
    fn finds_the_declared_field_for_a_wire_key() {
        let naming = FieldNaming::LowerCaseWithUnderscores;

        assert_eq!(naming.field_for("developer_message", FIELDS), None);
        assert_eq!(naming.field_for("developerMessage", FIELDS), Some("developer_message"));
        assert_eq!(naming.field_for("upload_link", FIELDS), Some("uploadLink"));
        assert_eq!(naming.field_for("link", FIELDS), None);
        assert_eq!(FieldNaming::Identity.field_for("developerMessage", FIELDS), None);
    }
}
