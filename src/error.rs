use thiserror::Error;

/// 엄격 모드에서 보고하는 습공기 계산 오류.
///
/// 기본 동작에서는 잘못된 입력이 NaN 으로 전파될 뿐 오류가 나지 않는다.
/// 호출자가 즉시 실패를 원할 때만 이 타입을 사용한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// 숫자로 해석할 수 없는 입력
    #[error("숫자로 해석할 수 없는 입력: {input:?}")]
    Parse { input: String },

    /// 유한하지 않은 계산 결과 (정의역 밖 입력)
    #[error("지점 {index}의 {quantity} 값이 유한하지 않습니다: {value}")]
    Domain {
        index: usize,
        quantity: &'static str,
        value: f64,
    },

    /// 이슬점/상대습도를 구할 정보가 없는 지점
    #[error("지점 {index}에 이슬점이나 상대습도를 구할 정보가 없습니다")]
    Underspecified { index: usize },
}

pub type Result<T> = std::result::Result<T, PsychroError>;
