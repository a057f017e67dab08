//! Static project showcase data.

use crate::i18n::MessageCatalog;

/// A showcased project. Titles and descriptions are looked up in the
/// catalog under `project_items.{slug}`; the Korean text here is used when a
/// catalog has no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

impl Project {
    pub fn localized_title<'a>(&'a self, messages: &'a MessageCatalog) -> &'a str {
        messages
            .get(&format!("project_items.{}.title", self.slug))
            .unwrap_or(self.title)
    }

    pub fn localized_description<'a>(&'a self, messages: &'a MessageCatalog) -> &'a str {
        messages
            .get(&format!("project_items.{}.description", self.slug))
            .unwrap_or(self.description)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "ai-chatbot",
        title: "AI 기반 챗봇 시스템",
        description: "LLM 기반 고객 지원 챗봇으로 자연어 질문 이해 및 답변 생성",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=AI+Chatbot",
        tags: &["Python", "LangChain", "OpenAI", "FastAPI"],
    },
    Project {
        slug: "multiplayer-game",
        title: "실시간 멀티플레이어 게임",
        description: "WebSocket 기반 실시간 동기화 게임 서버",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=Multiplayer+Game",
        tags: &["Node.js", "WebSocket", "Redis", "React"],
    },
    Project {
        slug: "cv-tool",
        title: "컴퓨터 비전 분석 도구",
        description: "이미지 처리 및 객체 검출을 위한 CV 분석 플랫폼",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=Computer+Vision",
        tags: &["Python", "OpenCV", "TensorFlow", "Flask"],
    },
    Project {
        slug: "cloud-dashboard",
        title: "클라우드 관리 대시보드",
        description: "인프라 모니터링 및 리소스 관리 시스템",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=Cloud+Dashboard",
        tags: &["React", "TypeScript", "AWS", "GraphQL"],
    },
    Project {
        slug: "game-ai",
        title: "게임 AI 엔진",
        description: "강화학습 기반 NPC 행동 및 의사결정 시스템",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=Game+AI",
        tags: &["Python", "PyTorch", "RL", "Unity"],
    },
    Project {
        slug: "nlp-pipeline",
        title: "자연어 처리 파이프라인",
        description: "텍스트 분석, 감성 분류, 요약 자동화 플랫폼",
        image: "https://placehold.co/600x400/e2e8f0/0f172a?text=NLP+Pipeline",
        tags: &["Python", "Hugging Face", "spaCy", "Kubernetes"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = PROJECTS.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PROJECTS.len());
    }

    #[test]
    fn test_localized_text_prefers_catalog() {
        let messages = MessageCatalog::from_json_str(
            Locale::ENGLISH,
            r#"{"project_items": {"ai-chatbot": {"title": "AI Chatbot System"}}}"#,
        )
        .unwrap();

        let project = &PROJECTS[0];
        assert_eq!(project.localized_title(&messages), "AI Chatbot System");
        assert_eq!(project.localized_description(&messages), project.description);
    }
}
