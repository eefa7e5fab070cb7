/// A single allergen category: the Korean category name used as the
/// canonical key, an English display label, and the literal keywords
/// that mark the category as present in an ingredient statement.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub english: String,
    pub keywords: Vec<String>,
}

/// Ordered allergen taxonomy. Built once at startup and shared read-only;
/// detection output follows the declaration order of the categories.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

fn category(name: &str, english: &str, keywords: &[&str]) -> Category {
    Category {
        name: name.to_string(),
        english: english.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The default taxonomy for Korean food labels: the statutory allergen
    /// categories plus a few common trigger ingredients. Keywords include
    /// lowercase English terms so that English-language ingredient
    /// statements from the registries are covered as well.
    pub fn korean_default() -> Self {
        Self::new(vec![
            category(
                "소고기",
                "Beef",
                &[
                    "소고기", "쇠고기", "우육", "비프", "등심", "안심", "채끝", "양지",
                    "사태", "우둔", "설도", "갈비", "육우", "beef",
                ],
            ),
            category(
                "돼지고기",
                "Pork",
                &["돼지고기", "돼지", "포크", "베이컨", "햄", "삼겹살", "목살", "라드", "pork"],
            ),
            category(
                "닭고기",
                "Chicken",
                &["닭", "닭고기", "치킨", "가금류", "닭가슴살", "닭다리", "닭봉", "chicken"],
            ),
            category(
                "우유",
                "Milk & Dairy",
                &[
                    "우유", "유제품", "치즈", "버터", "생크림", "연유", "유당", "유청",
                    "카제인", "분유", "유크림", "우유알레르기", "milk", "cheese", "butter",
                ],
            ),
            category(
                "계란",
                "Egg",
                &["계란", "달걀", "알류", "난백", "난황", "전란", "계란흰자", "계란노른자", "egg"],
            ),
            category(
                "메밀",
                "Buckwheat",
                &["메밀", "메밀가루", "메밀국수", "소바", "메밀묵", "buckwheat"],
            ),
            category(
                "밀",
                "Wheat",
                &["밀", "밀가루", "글루텐", "밀글루텐", "밀배아", "wheat", "gluten"],
            ),
            category(
                "대두",
                "Soybean",
                &["대두", "콩", "두유", "두부", "된장", "간장", "콩제품", "소이", "서리태", "soy"],
            ),
            category(
                "땅콩",
                "Peanut",
                &["땅콩", "피넛", "땅콩버터", "땅콩유", "peanut"],
            ),
            category("호두", "Walnut", &["호두", "월넛", "호두유", "walnut"]),
            category("잣", "Korean Pine Nut", &["잣", "솔씨", "pine nut"]),
            category(
                "고등어",
                "Mackerel",
                &["고등어", "고등어알", "고등어젓", "mackerel"],
            ),
            category(
                "생선류",
                "Fish",
                &[
                    "생선", "어류", "참치", "연어", "멸치", "어분", "생선까나리", "어유",
                    "tuna", "salmon", "anchovy",
                ],
            ),
            category("게", "Crab", &["게", "크랩", "게살", "게다리", "crab"]),
            category(
                "새우",
                "Shrimp",
                &["새우", "새우류", "랍스터", "새우젓", "새우액젓", "왕새우", "shrimp"],
            ),
            category(
                "오징어",
                "Squid",
                &["오징어", "오징어채", "오징어젓", "오징어먹물", "squid"],
            ),
            category(
                "조개류",
                "Shellfish",
                &[
                    "조개류", "굴", "전복", "홍합", "바지락", "조개", "굴젓", "전복손질",
                    "oyster", "clam", "mussel",
                ],
            ),
            category(
                "복숭아",
                "Peach",
                &["복숭아", "복숭아주스", "복숭아시럽", "peach"],
            ),
            category(
                "토마토",
                "Tomato",
                &["토마토", "토마토소스", "토마토페이스트", "토마토케첩", "tomato"],
            ),
            category(
                "아황산류",
                "Sulfites",
                &["아황산류", "아황산염", "아황산", "이산화황", "황산염", "차아황산", "sulfite"],
            ),
            category("젤라틴", "Gelatin", &["젤라틴", "gelatin"]),
        ])
    }
}
