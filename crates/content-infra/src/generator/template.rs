//! Template generator - offline fallback when no endpoint is configured.
//!
//! Produces the same canned texts the hosted function falls back to when
//! it has no model key.

use async_trait::async_trait;

use content_core::domain::{Platform, Tone};
use content_core::ports::{
    GeneratedText, GenerationError, GenerationRequest, GenerationSource, PostGenerator,
};

/// Generator that fills per-platform, per-tone templates with the topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the template for `platform` and `tone`.
    pub fn render(platform: Platform, tone: Tone, topic: &str) -> String {
        match (platform, tone) {
            (Platform::Telegram, Tone::Professional) => format!(
                "<b>{topic}</b>\n\nКлючевые моменты:\n\n▫️ Анализ ситуации\n▫️ Стратегическое планирование\n▫️ Достижение результатов\n\nПодробности в закрепе канала 📌"
            ),
            (Platform::Telegram, Tone::Friendly) => format!(
                "{topic} 🎯\n\nДрузья, это важно!\n\n💡 Главная мысль: всё в ваших руках\n💡 Секрет успеха: постоянство\n💡 Результат: гарантирован\n\nСохраняй, чтобы не потерять! ⭐️"
            ),
            (Platform::Telegram, Tone::Motivational) => format!(
                "⚡️ <b>{topic}</b>\n\n🎯 Твоя цель - твоя сила!\n🎯 Твои действия - твой результат!\n🎯 Твоё время - СЕЙЧАС!\n\nНе жди понедельника. Начни прямо сейчас! 🔥\n\n#мотивация #цель #действие"
            ),
            (Platform::Instagram, Tone::Professional) => format!(
                "{topic} ✨\n\nПрофессиональный взгляд на актуальную тему.\n\nОсновные принципы:\n1️⃣ Качество превыше всего\n2️⃣ Постоянное развитие\n3️⃣ Измеримые результаты\n\nСохрани пост, чтобы вернуться позже 🔖\n\n#бизнес #развитие #профессионализм #успех #карьера"
            ),
            (Platform::Instagram, Tone::Friendly) => format!(
                "Всем привет! 💕\n\n{topic} - вот о чём хочу поговорить сегодня!\n\nЗнаете, это так важно:\n🌸 Быть собой\n🌸 Делиться опытом\n🌸 Вдохновлять других\n\nА вы как относитесь к этому? 💭\n\n#жизнь #мысли #вдохновение #lifestyle #позитив"
            ),
            (Platform::Instagram, Tone::Motivational) => format!(
                "{topic} 🔥\n\nЗАПОМНИ:\n\n💎 Ты сильнее, чем думаешь\n💎 Ты способен на большее\n💎 Твоё время пришло\n\nНе откладывай мечты на завтра! Действуй СЕЙЧАС! ⚡️\n\nОтметь того, кому нужна эта мотивация! 👇\n\n#мотивация #цели #успех #саморазвитие #inspiration"
            ),
            (Platform::Threads, Tone::Professional) => format!(
                "{topic}\n\nВажные аспекты:\n\n• Профессиональный подход\n• Системность\n• Результативность\n\nДелитесь опытом в ответах 💬"
            ),
            (Platform::Threads, Tone::Friendly) => format!(
                "Всем привет! 👋\n\n{topic} - давайте обсудим!\n\n✨ Это важно\n✨ Это актуально\n✨ Это работает\n\nА как у вас с этим? 🤔"
            ),
            (Platform::Threads, Tone::Motivational) => format!(
                "{topic} 💪\n\nПомни:\n\n🔥 Ты можешь больше\n🔥 Твоя цель близка\n🔥 Действуй прямо сейчас\n\nУспех ждёт тебя! 🚀"
            ),
            (Platform::Youtube, Tone::Professional) => format!(
                "{topic}\n\nВ этом видео разберём:\n\n📌 Ключевые концепции\n📌 Практические примеры\n📌 Пошаговый план действий\n\nПодписывайтесь и ставьте лайк! 👍"
            ),
            (Platform::Youtube, Tone::Friendly) => format!(
                "Всем привет! 👋\n\nСегодня говорим про {topic}!\n\n💡 Простые советы\n💡 Реальные примеры\n💡 Проверенные методы\n\nСмотрите до конца и ставьте лайк! ❤️"
            ),
            (Platform::Youtube, Tone::Motivational) => format!(
                "{topic} 🔥\n\nВ этом ролике:\n\n⚡️ Как начать действовать\n⚡️ Как достичь цели\n⚡️ Как изменить жизнь\n\nПодпишись и включи уведомления! 🔔\n\n#мотивация #успех #саморазвитие"
            ),
            (Platform::Vk, _) => format!("{topic}\n\nГенерация через шаблоны."),
        }
    }
}

#[async_trait]
impl PostGenerator for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, GenerationError> {
        if request.topic.is_empty() {
            return Err(GenerationError::Rejected {
                status: 400,
                message: "Topic is required".to_string(),
            });
        }

        Ok(GeneratedText {
            text: Self::render(request.platform, request.tone, &request.topic),
            source: Some(GenerationSource::Template),
        })
    }

    fn name(&self) -> &'static str {
        "template"
    }
}
