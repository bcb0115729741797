/*!
# `GOTO <line>`

## Purpose
Continue execution at another line.

## Remarks
The target may be any numeric expression; it is rounded to a line
number. Jumping to a line that does not exist is UNDEFINED LINE.

*/
