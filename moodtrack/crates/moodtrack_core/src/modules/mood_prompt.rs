pub const MOOD_PROMPT: &str = r#"이 동영상을 분석해서 다음 두 가지를 JSON으로만 출력해줘.

1) 분위기 키워드 (다음 네 가지 반영):
- 색감: 전체적인 색 톤, 채도, 따뜻함/차가움
- 조명: 밝기, 방향, 부드러움/드라마틱함
- 표정: 인물이 있다면 표정에서 읽히는 감정
- 구도: 배치·구도에서 오는 인상 (안정감, 긴장감 등)

키워드는 가능하면 짧은 형용사나 명사 하나로 써줘. (예: 따뜻한, 차가운, 밝은, 어두운, 부드러운, 드라마틱한, 설레는, 슬픈, 긴장감, 안정감, 웅장한, 몽환적인)

2) 드라마 장르 추측: 이 장면이 어떤 드라마 장르의 한 장면일지 가장 적합한 것 하나를 추측해줘.
다음 중 하나를 그대로 써줘: 로맨스, 멜로, 스릴러, 미스터리, 사극, 판타지, 코미디, 액션, 일상, 의학, 법정

반드시 아래 형식의 JSON 하나만 출력해줘. 다른 설명 없이.
{"keywords": ["따뜻한", "편안한", "실내"], "genre": "로맨스"}"#;
