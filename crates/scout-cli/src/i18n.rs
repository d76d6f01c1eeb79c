//! Interface strings for the three supported languages.

use scout_model::Locale;

const PT: &[(&str, &str)] = &[
    ("header.title", "Sistema de Scout MIR4"),
    ("header.subtitle", "Rastreamento e Coordenação de World Bosses"),
    ("dashboard.totalScouts", "Total de Scouts"),
    ("dashboard.activeClans", "Clãs Ativos"),
    ("dashboard.coveredMaps", "Mapas Cobertos"),
    ("dashboard.languages", "Idiomas"),
    ("dashboard.languageDistribution", "Distribuição por Idioma"),
    ("dashboard.mainShifts", "Turnos Principais"),
    ("list.activeScouts", "Scouts Ativos"),
    ("list.tableView", "Visualização em Tabela"),
    ("list.timelineLine", "Linha do Tempo"),
    ("list.empty", "Nenhum scout cadastrado ainda"),
    ("timeline.empty", "Nenhuma atividade recente"),
    ("timeline.entry", "Novo Scout Cadastrado"),
    ("card.clan", "Clã"),
    ("card.map", "Mapa"),
    ("card.language", "Idioma"),
    ("card.shift", "Turno"),
    ("card.power", "Poder"),
    ("card.wbRole", "Função WB"),
    ("table.id", "ID"),
    ("table.nickname", "Nickname"),
    ("table.clan", "Clã"),
    ("table.map", "Mapa"),
    ("table.power", "Poder"),
    ("table.language", "Idioma"),
    ("table.shift", "Turno"),
    ("table.wbRole", "Função WB"),
    ("table.registered", "Cadastro"),
    ("common.morning", "Manhã"),
    ("common.afternoon", "Tarde"),
    ("common.night", "Noite"),
    ("common.dawn", "Madrugada"),
    ("toast.added", "Scout cadastrado com sucesso!"),
    ("toast.required", "Preencha os campos obrigatórios: MAPA, NICK e CLÃ"),
    ("toast.deleted", "Scout removido"),
    ("toast.notFound", "Nenhum scout com esse ID"),
    ("toast.exported", "Dados exportados com sucesso!"),
    ("toast.imported", "scouts importados com sucesso!"),
    ("toast.importError", "Erro ao importar dados. Verifique o formato do arquivo."),
    ("toast.language", "Idioma da interface"),
];

const EN: &[(&str, &str)] = &[
    ("header.title", "MIR4 Scout System"),
    ("header.subtitle", "World Boss Tracking and Coordination"),
    ("dashboard.totalScouts", "Total Scouts"),
    ("dashboard.activeClans", "Active Clans"),
    ("dashboard.coveredMaps", "Covered Maps"),
    ("dashboard.languages", "Languages"),
    ("dashboard.languageDistribution", "Language Distribution"),
    ("dashboard.mainShifts", "Main Shifts"),
    ("list.activeScouts", "Active Scouts"),
    ("list.tableView", "Table View"),
    ("list.timelineLine", "Timeline"),
    ("list.empty", "No scouts registered yet"),
    ("timeline.empty", "No recent activity"),
    ("timeline.entry", "New Scout Registered"),
    ("card.clan", "Clan"),
    ("card.map", "Map"),
    ("card.language", "Language"),
    ("card.shift", "Shift"),
    ("card.power", "Power"),
    ("card.wbRole", "WB Role"),
    ("table.id", "ID"),
    ("table.nickname", "Nickname"),
    ("table.clan", "Clan"),
    ("table.map", "Map"),
    ("table.power", "Power"),
    ("table.language", "Language"),
    ("table.shift", "Shift"),
    ("table.wbRole", "WB Role"),
    ("table.registered", "Registered"),
    ("common.morning", "Morning"),
    ("common.afternoon", "Afternoon"),
    ("common.night", "Night"),
    ("common.dawn", "Dawn"),
    ("toast.added", "Scout registered successfully!"),
    ("toast.required", "Fill in the required fields: MAP, NICK and CLAN"),
    ("toast.deleted", "Scout removed"),
    ("toast.notFound", "No scout with that ID"),
    ("toast.exported", "Data exported successfully!"),
    ("toast.imported", "scouts imported successfully!"),
    ("toast.importError", "Error importing data. Check the file format."),
    ("toast.language", "Interface language"),
];

const ES: &[(&str, &str)] = &[
    ("header.title", "Sistema de Scout MIR4"),
    ("header.subtitle", "Rastreo y Coordinación de World Bosses"),
    ("dashboard.totalScouts", "Total de Scouts"),
    ("dashboard.activeClans", "Clanes Activos"),
    ("dashboard.coveredMaps", "Mapas Cubiertos"),
    ("dashboard.languages", "Idiomas"),
    ("dashboard.languageDistribution", "Distribución por Idioma"),
    ("dashboard.mainShifts", "Turnos Principales"),
    ("list.activeScouts", "Scouts Activos"),
    ("list.tableView", "Vista de Tabla"),
    ("list.timelineLine", "Línea de Tiempo"),
    ("list.empty", "Aún no hay scouts registrados"),
    ("timeline.empty", "No hay actividad reciente"),
    ("timeline.entry", "Nuevo Scout Registrado"),
    ("card.clan", "Clan"),
    ("card.map", "Mapa"),
    ("card.language", "Idioma"),
    ("card.shift", "Turno"),
    ("card.power", "Poder"),
    ("card.wbRole", "Función WB"),
    ("table.id", "ID"),
    ("table.nickname", "Nickname"),
    ("table.clan", "Clan"),
    ("table.map", "Mapa"),
    ("table.power", "Poder"),
    ("table.language", "Idioma"),
    ("table.shift", "Turno"),
    ("table.wbRole", "Función WB"),
    ("table.registered", "Registro"),
    ("common.morning", "Mañana"),
    ("common.afternoon", "Tarde"),
    ("common.night", "Noche"),
    ("common.dawn", "Madrugada"),
    ("toast.added", "¡Scout registrado con éxito!"),
    ("toast.required", "Complete los campos obligatorios: MAPA, NICK y CLAN"),
    ("toast.deleted", "Scout eliminado"),
    ("toast.notFound", "Ningún scout con ese ID"),
    ("toast.exported", "¡Datos exportados con éxito!"),
    ("toast.imported", "scouts importados con éxito!"),
    ("toast.importError", "Error al importar datos. Verifique el formato del archivo."),
    ("toast.language", "Idioma de la interfaz"),
];

/// Look up `key` for `locale`. Unknown keys come back unchanged.
pub fn t(locale: Locale, key: &str) -> &str {
    let table = match locale {
        Locale::Pt => PT,
        Locale::En => EN,
        Locale::Es => ES,
    };
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or(key, |(_, text)| *text)
}
