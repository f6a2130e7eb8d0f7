use indexmap::IndexMap;

pub fn probe(names: &[String]) -> IndexMap<String, String> {
    names
        .iter()
        .map(|name| {
            let resolved = which::which(name)
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            (name.clone(), resolved)
        })
        .collect()
}
