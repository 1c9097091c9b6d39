use super::ErrorsChanged;

/// Трейт для сущностей, сообщающих ошибки по отдельным полям
pub trait DataErrorInfo {
    /// Тип идентификатора поля
    type Field: Copy;

    /// Первое сообщение об ошибке для поля
    fn error_for(&self, field: Self::Field) -> Option<String>;

    /// Ошибка уровня сущности, не привязанная к полю
    fn error(&self) -> Option<String> {
        None
    }
}

/// Сущность с полным списком ошибок и подпиской на их изменение
pub trait NotifyDataErrorInfo: DataErrorInfo {
    /// Все сообщения по полю, или по всем полям при `None`
    fn errors(&self, field: Option<Self::Field>) -> Vec<String>;

    fn has_errors(&self) -> bool {
        !self.errors(None).is_empty()
    }

    fn errors_changed(&self) -> &ErrorsChanged<Self::Field>;
}
