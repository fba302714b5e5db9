//! Booking form, validation advisories, and confirmation text.

use super::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    let (pt, en) = match key {
        // --- Form ---
        "booking.back" => ("← Voltar aos Serviços", "← Back to Services"),
        "booking.datetime.title" => ("Selecionar Data e Hora", "Select Date & Time"),
        "booking.date.label" => ("Escolher Data", "Choose Date"),
        "booking.date.placeholder" => ("Selecione uma data", "Pick a date"),
        "booking.time.label" => ("Escolher Hora", "Choose Time"),
        "booking.time.placeholder" => ("Selecione um horário", "Select a time slot"),
        "booking.info.title" => ("As Suas Informações", "Your Information"),
        "booking.firstName" => ("Primeiro Nome", "First Name"),
        "booking.lastName" => ("Último Nome", "Last Name"),
        "booking.email" => ("Email", "Email"),
        "booking.phone" => ("Telemóvel", "Phone Number"),
        "booking.additional.title" => ("Informações Adicionais", "Additional Information"),
        "booking.message.label" => (
            "Conte-nos sobre os seus objetivos ou requisitos específicos",
            "Tell us about your goals or any specific requirements",
        ),
        "booking.message.placeholder" => (
            "Partilhe detalhes adicionais que nos ajudem a preparar a sua sessão...",
            "Share any additional details that will help us prepare for your session...",
        ),
        "booking.ready.title" => ("Pronto para reservar?", "Ready to book?"),
        "booking.ready.subtitle" => (
            "Receberá um email de confirmação em breve.",
            "You will receive a confirmation email shortly.",
        ),
        "booking.submit" => ("Reservar Compromisso - {price}", "Book Appointment - {price}"),
        "booking.submitting" => ("A processar...", "Booking..."),

        // --- Advisories ---
        "booking.missing.title" => ("Informação em Falta", "Missing Information"),
        "booking.missing.datetime" => (
            "Por favor, selecione uma data e hora para o seu compromisso.",
            "Please select a date and time for your appointment.",
        ),
        "booking.missing.fields" => (
            "Por favor, preencha todos os campos obrigatórios.",
            "Please fill in all required fields.",
        ),
        "booking.unavailable.title" => ("Data Indisponível", "Date Unavailable"),
        "booking.unavailable.date" => (
            "{date} não está disponível. Escolha um dia útil a partir de hoje.",
            "{date} is not available. Please choose a weekday from today onwards.",
        ),
        "booking.failed.title" => ("Reserva Não Concluída", "Booking Not Completed"),
        "booking.failed.desc" => (
            "Não foi possível concluir a sua reserva: {reason}",
            "We could not complete your booking: {reason}",
        ),
        "booking.cancelled" => ("A reserva foi cancelada.", "The booking was cancelled."),
        "booking.clear.hint" => ("{input} para limpar", "{input} to clear"),

        // --- Confirmation ---
        "booking.confirmed.title" => ("Reserva Confirmada!", "Booking Confirmed!"),
        "booking.confirmed.desc" => (
            "O seu compromisso {service} foi agendado para {date} às {time}.",
            "Your {service} appointment has been scheduled for {date} at {time}.",
        ),
        "booking.confirmation.title" => ("Reserva Confirmada!", "Booking Confirmed!"),
        "booking.confirmation.email" => (
            "Receberá um email com a confirmação do seu compromisso.",
            "You will receive an email with your appointment confirmation.",
        ),
        "booking.confirmation.details" => ("Detalhes da Reserva", "Booking Details"),
        "booking.confirmation.service" => ("Serviço", "Service"),
        "booking.confirmation.date" => ("Data", "Date"),
        "booking.confirmation.time" => ("Hora", "Time"),
        "booking.confirmation.client" => ("Cliente", "Client"),
        "booking.confirmation.calendar" => ("Adicionar ao Google Calendar", "Add to Google Calendar"),
        "booking.confirmation.close" => ("Fechar", "Close"),

        _ => return None,
    };
    Some(locale.pick(pt, en))
}
