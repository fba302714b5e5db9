//! Service catalog text.

use super::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    let (pt, en) = match key {
        "services.title" => ("Os Nossos Serviços", "Our Services"),
        "services.subtitle" => (
            "Escolha o serviço que melhor se adequa às suas necessidades empresariais",
            "Choose the service that best fits your business needs",
        ),
        "services.minutes" => ("minutos", "minutes"),
        "services.book" => ("Reservar", "Book"),
        "services.consultation" => ("Consultoria Empresarial", "Business Consultation"),
        "services.consultation.desc" => (
            "Análise completa da sua empresa e estratégias de crescimento personalizadas.",
            "Complete analysis of your business and personalized growth strategies.",
        ),
        "services.strategy" => ("Planeamento Estratégico", "Strategic Planning"),
        "services.strategy.desc" => (
            "Desenvolvimento de planos estratégicos para o crescimento sustentável do seu negócio.",
            "Development of strategic plans for sustainable business growth.",
        ),
        "services.review" => ("Revisão de Negócio", "Business Review"),
        "services.review.desc" => (
            "Avaliação detalhada dos processos e identificação de oportunidades de melhoria.",
            "Detailed evaluation of processes and identification of improvement opportunities.",
        ),
        "services.workshop" => ("Workshop de Liderança", "Leadership Workshop"),
        "services.workshop.desc" => (
            "Sessão intensiva para desenvolver competências de liderança e gestão de equipas.",
            "Intensive session to develop leadership skills and team management.",
        ),
        _ => return None,
    };
    Some(locale.pick(pt, en))
}
