//! Fixed user-facing failure texts

use tutor_domain::Subject;

pub const HINT_FAILED_TEXT: &str = "힌트를 가져오는 데 실패했습니다. 다시 시도해주세요.";

pub fn generation_failed(subject: Subject) -> String {
    format!(
        "'{}' 문제를 생성하는 데 실패했습니다. 잠시 후 다시 시도해 주세요.",
        subject.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failed_names_subject() {
        assert_eq!(
            generation_failed(Subject::Math),
            "'수학' 문제를 생성하는 데 실패했습니다. 잠시 후 다시 시도해 주세요."
        );
    }
}
