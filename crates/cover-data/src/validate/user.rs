use serde_json::Value;

use super::Checker;
use crate::user::User;

pub(super) fn check(checker: &mut Checker, value: &Value) -> Option<User> {
    let map = checker.object(value, "user")?;
    checker.check_keys(
        map,
        "user",
        &["id", "userName", "code", "globalRank", "countryRank"],
    );

    let id = checker.positive_id(map, "user", "id");
    let user_name = checker.non_empty_string(map, "user", "userName");
    let code = checker.string(map, "user", "code");
    let global_rank = checker.uint(map, "user", "globalRank");
    let country_rank = checker.uint(map, "user", "countryRank");

    Some(User {
        id: id?,
        user_name: user_name?,
        code: code?,
        global_rank: global_rank?,
        country_rank: country_rank?,
    })
}
