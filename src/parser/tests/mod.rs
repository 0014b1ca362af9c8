//! Тесты лексического анализатора
