use super::{read_lines, split_line, write_lines, HotelStore};
use crate::{
    error::StoreResult,
    seed::SeedData,
    types::{has_delimiter, User, LINE_DELIMITER},
};

impl<S: SeedData> HotelStore<S> {
    // ── Users ─────────────────────────────────────────────────────

    pub(super) fn write_users(&self, users: &[User]) -> StoreResult<()> {
        for u in users.iter().filter(|u| has_delimiter(&u.name) || has_delimiter(&u.national_id)) {
            log::warn!("store: user {} contains a delimiter and will not read back cleanly", u.id);
        }
        write_lines(&self.config.users_path, users.iter().map(user_to_line))
    }

    pub(super) fn read_users(&self) -> StoreResult<Vec<User>> {
        let path = &self.config.users_path;
        let lines = read_lines(path)?;
        let users = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let user = parse_user_line(line);
                if user.is_none() {
                    log::debug!("store: skipping corrupt line {} of {}", i + 1, path.display());
                }
                user
            })
            .collect();
        Ok(users)
    }
}

/// `id|name|national_id`
pub fn user_to_line(user: &User) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        user.id,
        user.name,
        user.national_id,
        sep = LINE_DELIMITER
    )
}

/// Parse one users-file line. `None` if it does not have exactly three
/// fields or the id is not an integer.
pub fn parse_user_line(line: &str) -> Option<User> {
    let [id, name, national_id] = <[&str; 3]>::try_from(split_line(line)).ok()?;
    Some(User {
        id: id.trim().parse().ok()?,
        name: name.to_string(),
        national_id: national_id.to_string(),
    })
}
