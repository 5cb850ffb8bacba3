use serde_json::{Map, Value};

use super::Checker;
use crate::beatmap::{Beatmap, ChartStats, DifficultyInfo, GameMode, ModSet, ModToggle, RankStatus};

pub(super) fn check(checker: &mut Checker, value: &Value) -> Option<Beatmap> {
    let map = checker.object(value, "beatmap")?;
    checker.check_keys(
        map,
        "beatmap",
        &[
            "id",
            "title",
            "artist",
            "creator",
            "mode",
            "status",
            "stats",
            "difficulty",
            "mods",
        ],
    );

    let id = checker.positive_id(map, "beatmap", "id");
    let title = checker.non_empty_string(map, "beatmap", "title");
    let artist = checker.non_empty_string(map, "beatmap", "artist");
    let creator = checker.non_empty_string(map, "beatmap", "creator");
    let mode = checker.enumeration::<GameMode>(map, "beatmap", "mode");
    let status = checker.enumeration::<RankStatus>(map, "beatmap", "status");
    let stats = map.get("stats").and_then(|v| check_stats(checker, v));
    let difficulty = map
        .get("difficulty")
        .and_then(|v| check_difficulty(checker, v));
    let mods = map.get("mods").and_then(|v| check_mods(checker, v));

    Some(Beatmap {
        id: id?,
        title: title?,
        artist: artist?,
        creator: creator?,
        mode: mode?,
        status: status?,
        stats: stats?,
        difficulty: difficulty?,
        mods: mods?,
    })
}

fn check_stats(checker: &mut Checker, value: &Value) -> Option<ChartStats> {
    let map = checker.object(value, "beatmap.stats")?;
    checker.check_keys(map, "beatmap.stats", &ChartStats::KEYS);

    let time = checker.stat(map, "beatmap.stats", "time");
    let bpm = checker.stat(map, "beatmap.stats", "bpm");
    let ar = checker.stat(map, "beatmap.stats", "ar");
    let cs = checker.stat(map, "beatmap.stats", "cs");
    let od = checker.stat(map, "beatmap.stats", "od");
    let hp = checker.stat(map, "beatmap.stats", "hp");

    Some(ChartStats {
        time: time?,
        bpm: bpm?,
        ar: ar?,
        cs: cs?,
        od: od?,
        hp: hp?,
    })
}

fn check_difficulty(checker: &mut Checker, value: &Value) -> Option<DifficultyInfo> {
    let map = checker.object(value, "beatmap.difficulty")?;
    checker.check_keys(map, "beatmap.difficulty", &["star", "name"]);

    let star = checker.non_negative(map, "beatmap.difficulty", "star");
    let name = checker.non_empty_string(map, "beatmap.difficulty", "name");

    Some(DifficultyInfo {
        star: star?,
        name: name?,
    })
}

fn check_mods(checker: &mut Checker, value: &Value) -> Option<ModSet> {
    let map = checker.object(value, "beatmap.mods")?;
    checker.check_keys(map, "beatmap.mods", &ModSet::KEYS);

    let ez = check_toggle(checker, map, "ez");
    let nf = check_toggle(checker, map, "nf");
    let ht = check_toggle(checker, map, "ht");
    let hd = check_toggle(checker, map, "hd");
    let hr = check_toggle(checker, map, "hr");
    let dt = check_toggle(checker, map, "dt");
    let nc = check_toggle(checker, map, "nc");
    let fl = check_toggle(checker, map, "fl");
    let sd = check_toggle(checker, map, "sd");
    let pf = check_toggle(checker, map, "pf");
    let rx = check_toggle(checker, map, "rx");
    let ap = check_toggle(checker, map, "ap");
    let so = check_toggle(checker, map, "so");
    let v2 = check_toggle(checker, map, "v2");

    Some(ModSet {
        ez: ez?,
        nf: nf?,
        ht: ht?,
        hd: hd?,
        hr: hr?,
        dt: dt?,
        nc: nc?,
        fl: fl?,
        sd: sd?,
        pf: pf?,
        rx: rx?,
        ap: ap?,
        so: so?,
        v2: v2?,
    })
}

fn check_toggle(checker: &mut Checker, map: &Map<String, Value>, key: &str) -> Option<ModToggle> {
    let value = map.get(key)?;
    let path = format!("beatmap.mods.{key}");
    let toggle = checker.object(value, &path)?;
    checker.check_keys(toggle, &path, &["enabled"]);
    let enabled = checker.boolean(toggle, &path, "enabled")?;
    Some(ModToggle { enabled })
}
