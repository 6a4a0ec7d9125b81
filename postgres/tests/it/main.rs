mod helper;
mod track;
