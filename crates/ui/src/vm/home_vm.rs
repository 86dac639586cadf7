use services::CategoryOverview;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeTileVm {
    pub id: String,
    pub name: String,
    pub kicker: String,
    pub tagline: String,
    pub percent_label: String,
    pub attempts_label: String,
}

#[must_use]
pub fn map_home_tiles(overviews: &[CategoryOverview]) -> Vec<HomeTileVm> {
    overviews
        .iter()
        .map(|item| HomeTileVm {
            id: item.category.id.to_string(),
            name: item.category.name.clone(),
            kicker: format!("Category • Pages {}", item.category.range),
            tagline: item.category.tagline.clone(),
            percent_label: format!("{}%", item.percent),
            attempts_label: format!("{} quiz attempt(s)", item.attempts),
        })
        .collect()
}
