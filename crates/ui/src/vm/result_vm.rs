use quiz_core::{Animal, Category};
use services::ResultScreen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyRowVm {
    pub label: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub category: Animal,
    pub headline: String,
    pub image_src: String,
    pub image_alt: String,
    pub share_text: String,
    pub share_link: String,
    pub breakdown: Vec<TallyRowVm>,
}

#[must_use]
pub fn map_result_screen(screen: &ResultScreen<Animal>) -> ResultVm {
    let category = screen.outcome.category;
    let breakdown = screen
        .outcome
        .tally
        .iter()
        .map(|(animal, count)| TallyRowVm {
            label: animal.slug().to_string(),
            count,
        })
        .collect();

    ResultVm {
        category,
        headline: screen.headline.clone(),
        image_src: screen.image_path.clone(),
        image_alt: category.slug().to_string(),
        share_text: screen.share.text.clone(),
        share_link: screen.share.link.to_string(),
        breakdown,
    }
}
