mod home_vm;
mod product_vm;
mod progress_vm;
mod quiz_vm;
mod time_fmt;

pub use home_vm::{HomeTileVm, map_home_tiles};
pub use product_vm::{
    ProductCardVm, SkuVm, map_product_card, product_count_label, product_reference_label,
};
pub use progress_vm::{ProgressRowVm, map_progress_rows};
pub use quiz_vm::{
    ChoiceVm, ExplanationVm, QuestionVm, QuizIntent, QuizSummaryVm, map_question, map_quiz_summary,
};
pub use time_fmt::{EMPTY_LABEL, format_local, format_optional};
